pub mod cli;

pub use cli::{Cli, Command, ConvertArgs, ConvertCli, ReindexArgs, ReindexCli};
