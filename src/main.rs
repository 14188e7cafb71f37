#[cfg(test)]
#[macro_use]
extern crate quickcheck_macros;

mod display;
mod error;
mod field;
mod game;
mod util;


#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = clap::App::new("cavern")
        .version(clap::crate_version!())
        .about("A small falling-stone push puzzle for ANSI terminals")
        .arg(clap::Arg::with_name("tick-rate")
            .long("tick-rate")
            .value_name("HZ")
            .takes_value(true)
            .help("Number of simulation ticks per second"))
        .get_matches();

    let tick_rate = match matches.value_of("tick-rate") {
        Some(value) => value
            .parse::<u32>()
            .ok()
            .filter(|rate| *rate > 0)
            .ok_or("tick rate must be a positive number")?,
        None => game::DEFAULT_TICK_RATE,
    };

    let field = field::Field::new(game::LAYOUT)?;
    let avatar = field::Avatar::locate(&field)?;

    let (commands, queue) = tokio::sync::mpsc::unbounded_channel();
    tokio::spawn(game::read_commands(tokio::io::stdin(), commands));

    game::run(field, avatar, queue, tick_rate, tokio::io::stdout()).await?;
    Ok(())
}
