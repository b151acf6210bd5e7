pub mod filmstrip;
