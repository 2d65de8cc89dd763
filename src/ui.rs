//! Terminal rendition of the single-page prompt form.

use crate::error::PromptError;
use crate::generator::{GeneratedPair, PromptGenerator};
use std::io::{self, BufRead, Write};

pub const DEFAULT_IDEA: &str = "A wise old wizard in a magical forest";

const TITLE: &str = "🧙‍♂️ Creative AI Image Prompt Generator";
const SUBTITLE: &str = "Enter a simple idea, and I'll create a detailed, amazing prompt for you.";
const TIP: &str =
    "💡 Pro-Tip: Copy these prompts directly into your favorite AI image generator!";
const QUIT_COMMANDS: &[&str] = &[":q", "quit", "exit"];
const CLEAR_COMMAND: &str = ":clear";

/// Banner text for a failed client setup.
pub fn startup_banner(err: &PromptError) -> String {
    match err {
        PromptError::MissingCredential(_) => format!("Configuration Error: {err}"),
        _ => format!("Error connecting to OpenRouter: {err}"),
    }
}

pub struct Form<R, W> {
    input: R,
    output: W,
    idea: String,
    banner: Option<String>,
}

impl<R: BufRead, W: Write> Form<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            idea: DEFAULT_IDEA.to_string(),
            banner: None,
        }
    }

    pub fn with_banner(mut self, banner: Option<String>) -> Self {
        self.banner = banner;
        self
    }

    /// Runs the form until EOF or a quit command. A blank line keeps the
    /// current idea, `:clear` empties it.
    pub async fn run(&mut self, generator: &PromptGenerator) -> io::Result<()> {
        self.render_header()?;

        loop {
            write!(self.output, "\nYour Idea: [{}] ", self.idea)?;
            self.output.flush()?;

            let mut buf = Vec::new();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                writeln!(self.output)?;
                break;
            }
            let Ok(line) = String::from_utf8(buf) else {
                log::warn!("Discarded input line that was not valid UTF-8");
                writeln!(self.output, "⚠️  Input was not valid UTF-8, please try again.")?;
                continue;
            };

            let entered = line.trim();
            if QUIT_COMMANDS.contains(&entered) {
                break;
            }
            if entered == CLEAR_COMMAND {
                self.idea.clear();
            } else if !entered.is_empty() {
                self.idea = entered.to_string();
            }

            self.submit(generator).await?;
        }

        log::info!("Form session closed");
        Ok(())
    }

    /// One press of the "Create My Prompt" action.
    pub async fn submit(&mut self, generator: &PromptGenerator) -> io::Result<()> {
        writeln!(self.output, "✨ Create My Prompt")?;
        if self.idea.trim().is_empty() {
            writeln!(self.output, "⚠️  Please enter an idea first.")?;
            return Ok(());
        }

        writeln!(self.output, "Generating an amazing prompt...")?;
        self.output.flush()?;

        let idea = self.idea.clone();
        let pair = generator.generate(&idea).await;
        self.render_result(&pair)
    }

    fn render_header(&mut self) -> io::Result<()> {
        writeln!(self.output, "{TITLE}")?;
        writeln!(self.output, "{SUBTITLE}")?;
        if let Some(banner) = &self.banner {
            writeln!(self.output, "\n❌ {banner}")?;
        }
        Ok(())
    }

    fn render_result(&mut self, pair: &GeneratedPair) -> io::Result<()> {
        writeln!(self.output, "\n🎉 Your Prompts are Ready!")?;
        writeln!(self.output, "\nPositive Prompt")?;
        writeln!(self.output, "```\n{}\n```", pair.positive_prompt)?;
        writeln!(self.output, "\nNegative Prompt")?;
        writeln!(self.output, "```\n{}\n```", pair.negative_prompt)?;
        writeln!(self.output, "\n---")?;
        writeln!(self.output, "{TIP}")?;
        self.output.flush()
    }
}
