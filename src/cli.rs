use clap::{Args, Parser, Subcommand};

use securopass::types::credential::{GenerationPreferences, SamplingPolicy};

#[derive(Parser, Debug)]
#[command(name = "securopass")]
#[command(version, about = "SecuroPass - password generator and encrypted credential vault")]
pub struct Cli {
    /// Settings file (defaults to settings.json in the platform config directory)
    #[arg(long, global = true, env = "SECUROPASS_CONFIG")]
    pub config: Option<String>,

    /// Command to run; without one an interactive prompt starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// One line typed at the interactive prompt.
#[derive(Parser, Debug)]
#[command(name = "securopass", no_binary_name = true, disable_version_flag = true)]
pub struct PromptLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a password
    Gen(GenArgs),

    /// Encrypt and store a secret under an identifier
    Save {
        identifier: String,
        /// Secret text; several words are joined with single spaces
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true, trailing_var_arg = true)]
        secret: Vec<String>,
    },

    /// Print a stored secret
    Get { identifier: String },

    /// Remove a stored secret and its key
    Delete { identifier: String },

    /// List stored identifiers
    List,

    /// Print every stored secret
    Show,

    /// Inspect or change settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Args, Debug, Default)]
pub struct GenArgs {
    /// Password length (defaults to generator.length)
    pub length: Option<usize>,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_upper: bool,

    /// Leave out punctuation
    #[arg(long)]
    pub no_symbols: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_numbers: bool,

    /// Never repeat a character
    #[arg(long)]
    pub unique: bool,

    /// Phrase placed before the random characters; whitespace is stripped
    #[arg(long)]
    pub phrase: Option<String>,
}

impl GenArgs {
    /// Applies the flags on top of the configured defaults.
    pub fn apply(&self, mut prefs: GenerationPreferences) -> GenerationPreferences {
        if let Some(length) = self.length {
            prefs.length = length;
        }
        prefs.include_uppercase &= !self.no_upper;
        prefs.include_symbols &= !self.no_symbols;
        prefs.include_numbers &= !self.no_numbers;
        if self.unique {
            prefs.sampling = SamplingPolicy::WithoutReplacement;
        }
        match self.phrase.as_deref() {
            Some(raw) => prefs.with_phrase(raw),
            None => prefs,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print one setting, or all of them
    Get { key: Option<String> },

    /// Change one setting; VALUE is read as JSON, falling back to a plain string
    Set { key: String, value: String },

    /// Restore every setting to its default
    Reset,

    /// Print the settings file location
    Path,
}
