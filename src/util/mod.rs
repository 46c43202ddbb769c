pub mod dependency;
