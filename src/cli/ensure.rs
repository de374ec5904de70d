use clap::Parser;

/// Arguments for the ensure command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Make sure requests and yaml can be imported:\n    mydeps ensure requests yaml")]
pub struct EnsureArgs {
    /// Module names to make importable
    #[arg(required = true, value_name = "MODULE")]
    pub modules: Vec<String>,
}
