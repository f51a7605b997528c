use std::cell::RefCell;
use std::rc::Rc;

/// Where notification events are written. Cloning a buffered console shares
/// the underlying buffer.
#[derive(Debug, Clone, Default)]
pub enum Console {
    #[default]
    Stdout,
    Buffer(Rc<RefCell<Vec<String>>>),
}

impl Console {
    pub fn buffered() -> Self {
        Console::Buffer(Rc::new(RefCell::new(Vec::new())))
    }

    pub fn line(&self, line: &str) {
        match self {
            Console::Stdout => println!("{}", line),
            Console::Buffer(buf) => buf.borrow_mut().push(line.to_string()),
        }
    }

    /// Lines captured so far. Always empty for stdout.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Console::Stdout => Vec::new(),
            Console::Buffer(buf) => buf.borrow().clone(),
        }
    }
}
