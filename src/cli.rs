use std::path::PathBuf;

use bpaf::Bpaf;
use tracing::Level;

/// Calculate the molar mass of chemical formulas.
///
/// Run without formulas to open a tui.
#[derive(Debug, Clone, Bpaf)]
#[bpaf(version, options)]
pub struct MolarArgs {
    /// Decimal places shown for masses
    #[bpaf(long, argument("N"), fallback(3))]
    pub precision: usize,
    /// Number of recent results kept in the tui
    #[bpaf(long, argument("N"), fallback(10))]
    pub history: usize,
    /// Print the periodic table and exit
    #[bpaf(long, switch)]
    pub table: bool,
    /// Log level: error, warn, info, debug or trace
    #[bpaf(long, argument("LEVEL"), fallback(Level::WARN))]
    pub log_level: Level,
    /// Write logs to this file instead of stderr
    #[bpaf(long, argument("PATH"), optional)]
    pub log_file: Option<PathBuf>,
    /// Formulas to evaluate, e.g. 2H2O or C6H12O6
    #[bpaf(positional("FORMULA"), many)]
    pub formulas: Vec<String>,
}
