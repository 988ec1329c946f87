#[derive(PartialEq, Debug, Clone, Copy)]
pub enum Status {
    BadInput,
    Interrupted,
    Optimal,
}
