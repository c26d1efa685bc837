pub mod consulta;
