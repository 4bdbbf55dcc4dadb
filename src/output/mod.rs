// Output module - Result set rendering (JSON, Terminal)

pub mod json;
pub mod terminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Terminal,
    JSON,
    JSONPretty,
}
