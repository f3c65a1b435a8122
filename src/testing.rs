pub mod inflection_laws;
