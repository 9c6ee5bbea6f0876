use ewor_textgen::bf::BF;
use ewor_textgen::{emit, Op};

fn main() {
    let text = "Hello World!\n";

    let program = match emit(text) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("Error generating program: {}", e);
            std::process::exit(1);
        }
    };
    let code = program.to_string();
    println!(
        "Generated {} instructions ({} loops) for {} bytes of text",
        program.len(),
        program.count(Op::Open),
        text.len()
    );
    println!("{}", code);

    let mut bf = BF::new(&code);
    match bf.run() {
        Ok(_) => print!("{}", String::from_utf8_lossy(bf.output())),
        Err(e) => {
            eprintln!("Error running generated program: {}", e);
            std::process::exit(1);
        }
    }
}
