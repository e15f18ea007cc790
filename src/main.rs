use ip_subnet_codec::interfaces::{address, Selector, StaticInterfaces};
use ip_subnet_codec::models::Family;
use ip_subnet_codec::output::{format_subnet, subnets_print_csv};
use ip_subnet_codec::parse_subnets;
use std::error::Error;

const USAGE: &str = "usage: ip-subnet-codec [--csv|--json] <cidr>... | --address [name|public|private] [ipv4|ipv6]";

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let log_config = std::env::var("LOG4RS_CONFIG").unwrap_or_else(|_| "log4rs.yml".to_string());
    log4rs::init_file(&log_config, Default::default()).expect("Error initializing log4rs");
    log::info!("#Start main()");

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None => {
            eprintln!("{USAGE}");
        }
        Some("--address") => {
            let file = std::env::var("IP_INTERFACES_FILE")
                .map_err(|_| "IP_INTERFACES_FILE is not set")?;
            let host = StaticInterfaces::from_file(&file)?;
            let selector = Selector::parse(args.get(1).map(String::as_str));
            let family = args.get(2).map(|f| f.parse::<Family>()).transpose()?;
            match address(&host, selector, family) {
                Some(addr) => println!("{addr}"),
                None => return Err(format!("No address found for {selector:?}").into()),
            }
        }
        Some("--csv") => subnets_print_csv(&parse_subnets(&args[1..])?),
        Some("--json") => {
            let subnets = parse_subnets(&args[1..])?;
            println!("{}", serde_json::to_string_pretty(&subnets)?);
        }
        Some(_) => {
            for s in parse_subnets(&args)? {
                print!("{}", format_subnet(&s));
            }
        }
    }

    Ok(())
}
