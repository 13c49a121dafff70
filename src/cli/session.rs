//! Interactive registration session
//!
//! Menu-driven front end over [`RegistrationService`]: `add` collects name,
//! age and type as raw text, `show` prints one block per animal.

use tracing::{debug, info};

use crate::application::services::RegistrationService;
use crate::config::Settings;
use crate::domain::{capabilities_for, AnimalKind, RegistrationError};
use crate::infrastructure::traits::Console;
use crate::infrastructure::{InfraResult, IoResultExt};

const HELP: &str = "commands: add, show, kinds, help, quit";

/// One summary line per kind, e.g. `"Amphibian: sound, swim, jump"`.
pub fn kind_summary(kind: AnimalKind) -> String {
    let caps: Vec<_> = capabilities_for(kind).iter().map(|c| c.name()).collect();
    format!("{}: {}", kind, caps.join(", "))
}

fn kind_choices() -> String {
    let names: Vec<_> = AnimalKind::ALL.iter().map(|k| k.name()).collect();
    format!("Type ({}):", names.join(", "))
}

pub struct Session<'a> {
    settings: &'a Settings,
    service: &'a mut RegistrationService,
    console: &'a mut dyn Console,
}

impl<'a> Session<'a> {
    pub fn new(
        settings: &'a Settings,
        service: &'a mut RegistrationService,
        console: &'a mut dyn Console,
    ) -> Self {
        Self {
            settings,
            service,
            console,
        }
    }

    /// Run until `quit`, `exit`, or end of input.
    pub fn run(&mut self) -> InfraResult<()> {
        self.console
            .write_line(&self.settings.title)
            .with_context("write title")?;
        self.console.write_line(HELP).with_context("write help")?;

        loop {
            self.console
                .prompt(&self.settings.prompt)
                .with_context("write prompt")?;
            let Some(line) = self.console.read_line().with_context("read command")? else {
                break;
            };
            let command = line.trim().to_lowercase();
            debug!("session command: {:?}", command);

            match command.as_str() {
                "" => {}
                "add" => {
                    if !self.add_animal()? {
                        break;
                    }
                }
                "show" => self.show()?,
                "kinds" => self.kinds()?,
                "help" | "?" => self.console.write_line(HELP).with_context("write help")?,
                "quit" | "exit" => break,
                other => self
                    .console
                    .error(&format!("unknown command: {other} ({HELP})"))
                    .with_context("write error")?,
            }
        }
        info!("session ended with {} animals", self.service.registry().len());
        Ok(())
    }

    /// Prompt for one field. `None` on end of input.
    fn ask(&mut self, label: &str) -> InfraResult<Option<String>> {
        self.console.prompt(label).with_context("write prompt")?;
        self.console.read_line().with_context("read input")
    }

    /// Collect one animal. Returns `false` if input ended mid-form.
    fn add_animal(&mut self) -> InfraResult<bool> {
        let Some(name) = self.ask("Name:")? else {
            return Ok(false);
        };
        let Some(age) = self.ask("Age:")? else {
            return Ok(false);
        };
        let Some(kind) = self.ask(&kind_choices())? else {
            return Ok(false);
        };

        match self.service.register(&name, &age, &kind) {
            Ok(animal) => {
                info!("added {} ({})", animal.name(), animal.kind());
                if self.settings.confirm_additions {
                    self.console
                        .success("Animal added successfully!")
                        .with_context("write confirmation")?;
                }
            }
            Err(e) => {
                debug!("rejected: {e}");
                let msg = match e {
                    RegistrationError::InvalidAge { .. } => "Please enter a valid age.",
                    RegistrationError::InvalidKind(_) => "Invalid animal type.",
                };
                self.console.error(msg).with_context("write error")?;
            }
        }
        Ok(true)
    }

    fn show(&mut self) -> InfraResult<()> {
        for report in self.service.describe_all() {
            self.console
                .write_block(&report.to_string())
                .with_context("write report")?;
        }
        Ok(())
    }

    fn kinds(&mut self) -> InfraResult<()> {
        for kind in AnimalKind::ALL {
            self.console
                .write_line(&kind_summary(kind))
                .with_context("write kinds")?;
        }
        Ok(())
    }
}
