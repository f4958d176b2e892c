use bean_notify::logger::Logger;
use bean_notify::{Config, Notifier};
use std::env;
use std::error::Error;
use std::process::ExitCode;

const USAGE: &str = "usage: bean-notify <name> <email> <looking-for>";

fn main() -> Result<ExitCode, Box<dyn Error>>
{
    Logger::init();

    let mut args = env::args().skip(1);
    let (Some(name), Some(email), Some(looking_for), None) =
        (args.next(), args.next(), args.next(), args.next())
    else
    {
        eprintln!("{USAGE}");
        return Ok(ExitCode::from(2));
    };

    let cfg = Config::from_env()?;
    let notifier = Notifier::new(&cfg);

    if notifier.send(&name, &email, &looking_for)
    {
        Ok(ExitCode::SUCCESS)
    }
    else
    {
        Ok(ExitCode::FAILURE)
    }
}
