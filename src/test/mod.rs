mod descriptor;
mod network_spec;
