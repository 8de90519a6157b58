pub mod spisram;
