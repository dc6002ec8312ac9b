#[derive(clap::Parser, Debug)]
#[clap(about, long_about = None)]
pub(crate) struct Cli {
    /// Raise log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Command {
    /// Evaluate an expression. Reads one expression per line from stdin
    /// when none is given
    Eval {
        expr: Option<String>,

        /// Print the postfix form before the result
        #[arg(short, long)]
        postfix: bool,
    },

    /// Print the postfix form of an expression
    Postfix { expr: Option<String> },

    /// Print the expression tree
    Tree { expr: Option<String> },
}

impl Command {
    pub fn expr(&self) -> Option<&str> {
        match self {
            Self::Eval { expr, .. } | Self::Postfix { expr } | Self::Tree { expr } => {
                expr.as_deref()
            }
        }
    }
}
