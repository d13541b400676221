use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the questionnaire with its question and option ids
    Questions {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Interactive questionnaire, recommendations, images and chat
    Quiz,

    /// Get recommendations for answers given on the command line
    Recommend {
        /// Answer as `<question-id>=<option-id>`, e.g. `living_space=house_yard`
        #[arg(short = 'a', long = "answer", value_name = "QUESTION=OPTION", required = true)]
        answers: Vec<String>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Chat with the assistant about one pet
    Chat {
        #[arg(long)]
        pet_name: String,

        #[arg(long, default_value = "")]
        pet_description: String,

        /// Send these messages in order and print the transcript instead of
        /// reading from stdin
        #[arg(short, long = "message")]
        messages: Vec<String>,
    },

    /// Generate an image for a pet
    Image {
        name: String,

        /// Name used in the image prompt instead of `name`
        #[arg(long)]
        english_name: Option<String>,

        #[arg(long, default_value = "")]
        description: String,

        /// Write the image to this file
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Inspect or change the provider settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    Show,

    /// Update any subset of the stored fields
    Set {
        #[arg(long)]
        endpoint: Option<String>,

        #[arg(long)]
        api_key: Option<String>,

        #[arg(long)]
        model: Option<String>,

        #[arg(long)]
        system_prompt: Option<String>,

        /// Restore the built-in system prompt
        #[arg(long, conflicts_with = "system_prompt")]
        default_prompt: bool,
    },

    /// Delete the stored settings so defaults apply
    Reset,

    /// Send a minimal request to the custom endpoint
    Test {
        /// Test this endpoint instead of the stored one
        #[arg(long)]
        endpoint: Option<String>,

        #[arg(long)]
        api_key: Option<String>,

        #[arg(long)]
        model: Option<String>,
    },
}
