use tally::{evaluate, format_result};

fn main() -> Result<(), String> {
    if std::env::args().len() > 1 {
        let input = std::env::args().skip(1).collect::<Vec<String>>().join(" ");
        match evaluate(&input) {
            Err(e) => println!("Eval err: {:?}", e),
            Ok(result) => println!("{} = {}", input, format_result(result)),
        }
        return Ok(());
    }

    use rustyline::error::ReadlineError;
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    loop {
        match rl.readline(">> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(()),
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                match evaluate(&line) {
                    Err(e) => println!("Eval err: {:?}", e),
                    Ok(result) => println!("{}", format_result(result)),
                }
            }
        }
    }
}
