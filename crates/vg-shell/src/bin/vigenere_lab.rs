use clap::Parser;
use std::io::{self, BufRead, Write};
use vg_core::VigenereLabConfig;
use vg_shell::{init_logging, load_config, Args, Reply, Shell};

fn main() -> anyhow::Result<()> {
    init_logging()?;
    let args = Args::parse();
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => VigenereLabConfig::default(),
    };
    let mut shell = Shell::new(config)?;

    println!("Simple cipher playground command application, have fun!");
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        stdout.flush()?;
        let Some(line) = lines.next() else { break };
        match shell.run_line(&line?) {
            Ok(Reply::Output(text)) if text.is_empty() => {}
            Ok(Reply::Output(text)) => println!("{text}"),
            Ok(Reply::Quit(text)) => {
                println!("{text}");
                break;
            }
            Err(e) => eprintln!("error: {e}"),
        }
    }
    Ok(())
}
