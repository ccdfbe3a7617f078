use asn1oid::ObjectIdentifier;
use clap::Parser;
use tracing::debug;

mod cli;

pub fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let params = cli::Parameters::parse();
    debug!("{:?}", params);

    let mut failed = false;
    for value in &params.values {
        match ObjectIdentifier::parse(value) {
            Err(e) => {
                failed = true;
                eprintln!("Failed to parse {}, reason: {}", value, e);
            }
            Ok(oid) => print(
                &oid.with_alt_names(params.alt_names.iter().cloned()),
                params.output,
            ),
        }
    }

    if failed {
        std::process::exit(1);
    }
}

fn print(oid: &ObjectIdentifier, output: cli::Output) {
    match output {
        cli::Output::Dotted => println!("{}", oid.to_dotted()),
        cli::Output::NameForm => println!("{}", oid.to_name_form()),
        cli::Output::Asn1 => println!("{:?}", oid.to_integers()),
        cli::Output::All => {
            println!("{}", oid.to_dotted());
            println!("    name form:  {}", oid.to_name_form());
            if let Some(arc) = oid.last_arc() {
                println!(
                    "    last arc:   {} ({})",
                    arc.number(),
                    arc.identifier().unwrap_or("-")
                );
            }
            if !oid.alt_names().is_empty() {
                println!("    alt names:  {}", oid.alt_names().join(", "));
            }
        }
    }
}
