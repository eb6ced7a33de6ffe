//! Simple command that prints the UUIDv5 of each name argument, under the DNS namespace or
//! the '-n namespace' override

use std::{env, io, io::Write, process::ExitCode};
use uuid5::{uuid5, Namespace, Uuid};

fn main() -> io::Result<ExitCode> {
    let (namespace, names) = {
        let mut args = env::args();
        let program = args.next();
        match parse_args(args) {
            Ok((ns, names)) => (ns.unwrap_or(Namespace::Dns.to_uuid()), names),
            Err(message) => {
                eprintln!("Error: {}", message);
                eprintln!(
                    "Usage: {} [-n {{dns|url|oid|x500|<uuid>}}] name...",
                    program.as_deref().unwrap_or("uuid5")
                );
                return Ok(ExitCode::FAILURE);
            }
        }
    };

    let mut buf = io::BufWriter::new(io::stdout());
    for name in names {
        writeln!(buf, "{}", uuid5(namespace, name))?;
    }

    Ok(ExitCode::SUCCESS)
}

fn parse_args(
    mut args: impl Iterator<Item = String>,
) -> Result<(Option<Uuid>, Vec<String>), String> {
    let mut namespace = None;
    let mut names = Vec::new();
    while let Some(arg) = args.next() {
        if arg != "-n" {
            names.push(arg);
            continue;
        }
        if namespace.is_some() {
            return Err("option 'n' given more than once".to_owned());
        }
        let Some(ns_arg) = args.next() else {
            return Err("argument to option 'n' missing".to_owned());
        };
        let ns = match ns_arg.as_str() {
            "dns" => Namespace::Dns.to_uuid(),
            "url" => Namespace::Url.to_uuid(),
            "oid" => Namespace::Oid.to_uuid(),
            "x500" => Namespace::X500.to_uuid(),
            other => other
                .parse()
                .map_err(|_| format!("invalid argument to option 'n': '{}'", other))?,
        };
        namespace.replace(ns);
    }
    if names.is_empty() {
        return Err("name arguments missing".to_owned());
    }
    Ok((namespace, names))
}
