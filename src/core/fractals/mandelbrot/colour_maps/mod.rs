pub mod teal_red;
