//! Interactive prompts for the setup run.
//!
//! The prompter is generic over its input and output streams so the
//! interview and the Y/n confirmation can be exercised in tests with a
//! `Cursor`; the binary hands it locked stdin and stdout.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::fields::{derive_chrome_url, Field, FieldValues, PrimaryInputs, RawUserInput};

/// Column the `:` is aligned to in the confirmation summary.
const SUMMARY_WIDTH: usize = 20;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, question: &str) -> Result<RawUserInput> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(RawUserInput::new(&line))
    }

    /// The eight prompts, in fixed entry order. Free text is accepted
    /// for every field; the ID prompt embeds the chrome URL derived from
    /// the namespace just entered.
    pub fn interview(&mut self) -> Result<FieldValues> {
        writeln!(self.output)?;
        writeln!(
            self.output,
            "Please enter the following 8 pieces of information, so your provider add-on can be prepared."
        )?;
        writeln!(self.output)?;

        let addon_author = self.ask("1. Your name: ")?;
        let email = self.ask("2. Your email address: ")?;
        let addon_name =
            self.ask("3. The name of your add-on as shown in the Thunderbird add-on manager (en-US): ")?;
        let addon_description = self
            .ask("4. The description of your add-on as shown in the Thunderbird add-on manager (en-US): ")?;
        let addon_homepage = self.ask("5. The homepage of your add-on project: ")?;
        let name_space = self.ask(
            "6. A short identifier for your add-on, like 'dav' or 'google', which will be used as its name space inside TbSync: ",
        )?;
        let chrome_url = derive_chrome_url(name_space.as_str());
        let id = self.ask(&format!(
            "7. A unique ID for your add-on (e.g. {chrome_url}@yourcompany.com): "
        ))?;
        let menu_name = self.ask("8. The label for your provider in the TbSync add-account-menu: ")?;

        Ok(FieldValues::new(PrimaryInputs {
            addon_author,
            email,
            addon_name,
            addon_description,
            addon_homepage,
            name_space,
            id,
            menu_name,
        }))
    }

    /// Print the primary name/value pairs in entry order, names padded
    /// to a fixed column.
    pub fn summary(&mut self, values: &FieldValues) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "This is what has been entered:")?;
        writeln!(self.output)?;
        for field in Field::PRIMARY {
            writeln!(
                self.output,
                "{:<width$} : {}",
                field.name(),
                values.resolve(field),
                width = SUMMARY_WIDTH
            )?;
        }
        writeln!(self.output)?;
        Ok(())
    }

    /// `Is this correct? (Y/n)` - empty input accepts, an answer whose
    /// first non-space character is `n`/`N` aborts, anything else
    /// accepts. Unlike field answers, the confirmation is
    /// whitespace-trimmed before inspection.
    pub fn confirm(&mut self) -> Result<bool> {
        let answer = self.ask("Is this correct? (Y/n): ")?;
        Ok(!answer.as_str().trim().to_lowercase().starts_with('n'))
    }
}
