use std::path::PathBuf;
use std::process;

mod font;
mod keymap;
mod run;

fn fetch_config<'a>() -> clap::ArgMatches<'a> {
    clap::App::new("vip8")
        .version("0.1")
        .about("A CHIP-8 virtual machine with an sdl2 front end")
        .arg(
            clap::Arg::with_name("rom")
                .index(1)
                .required(true)
                .help("Path of the ROM to run"),
        )
        .arg(
            clap::Arg::with_name("hz")
                .long("hz")
                .takes_value(true)
                .default_value("60")
                .help("Machine cycles per second; each cycle is one timer tick"),
        )
        .get_matches()
}

fn main() {
    env_logger::init();
    let matches = fetch_config();

    let rom = PathBuf::from(matches.value_of("rom").expect("rom path is required"));
    let hz: u32 = match matches.value_of("hz").expect("hz has a default").parse() {
        Ok(hz) if hz > 0 => hz,
        _ => {
            eprintln!("--hz must be a positive integer");
            process::exit(2);
        }
    };

    if let Err(e) = run::run(rom, hz) {
        eprintln!("{}", e);
        process::exit(1);
    }
}
