pub mod instructions;
pub mod leg_merger;
pub mod path;
pub mod path_reconstructor;
pub mod route_response;
