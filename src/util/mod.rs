pub mod dna;
pub mod entropy;
