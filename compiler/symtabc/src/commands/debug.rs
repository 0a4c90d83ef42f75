//! Debug command: `lex` for inspecting how a command file is split.

use symtab_command::{Cursor, LineIndex};

use super::read_file;

/// Lex a file and display its words with their positions.
pub fn lex_file(path: &str) {
    let content = read_file(path);
    let index = LineIndex::new(&content);

    println!("Words for '{path}':");
    let mut count = 0usize;
    for word in Cursor::new(&content) {
        let position = index.line_col(word.span.start).to_string();
        println!("  {position:<8} {:?}", word.text);
        count += 1;
    }
    println!("Total: {count} words");
}
