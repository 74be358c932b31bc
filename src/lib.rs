pub mod config;
pub mod engine;
pub mod net;
pub mod topo;

#[cfg(test)]
mod test;
