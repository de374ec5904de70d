use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    mydeps completions bash > ~/.bash_completion.d/mydeps\n\n\
                  Generate zsh completions:\n    mydeps completions zsh > ~/.zfunc/_mydeps\n\n\
                  Generate fish completions:\n    mydeps completions fish > ~/.config/fish/completions/mydeps.fish\n\n\
                  Generate PowerShell completions:\n    mydeps completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
