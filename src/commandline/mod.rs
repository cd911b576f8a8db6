use clap::Parser;

#[derive(Debug, Parser)]
#[clap(about = "A scanner for the fox language")]
pub struct Options {
    /// Script to scan and run; starts a REPL when omitted
    pub script: Option<String>,
    #[clap(short, long, default_value_t = 1)]
    pub verbose: usize,
}
