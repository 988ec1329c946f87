mod csr;
pub mod edmonds_karp;
pub mod graph;
pub mod status;
