/// How the command line tool prints its matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// All matches as one compact JSON array. (Default)
    #[default]
    Array,
    /// One compact JSON value per line.
    Lines,
    /// All matches as one indented JSON array.
    Pretty,
}
