#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
pub struct Parameters {
    #[arg(
        value_enum,
        short = 'o',
        long = "output",
        env = "OID_OUTPUT",
        help = "How to print each parsed object identifier",
        default_value = "all"
    )]
    pub output: Output,
    #[arg(
        short = 'a',
        long = "alt-name",
        env = "OID_ALT_NAMES",
        value_delimiter = ',',
        help = "Alternate names to attach to every parsed object identifier"
    )]
    pub alt_names: Vec<String>,
    #[arg(
        env = "OID_VALUES",
        value_delimiter = ';',
        required = true,
        help = "Object identifiers in dotted notation or as NameAndNumberForm sequence"
    )]
    pub values: Vec<String>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, clap::ValueEnum)]
pub enum Output {
    Dotted,
    NameForm,
    Asn1,
    All,
}
