#[derive(Debug, Clone)]
pub enum ClientCommand {
    Place { cell: usize },
    Restart,
    Quit,
}
