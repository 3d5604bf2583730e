/// Main test module that includes all sub-modules
/// Run specific tests with `cargo test <module>::<submodule>`
/// For example: `cargo test classify::position_test`
// Utility modules
pub mod utils;

// Classification tests
pub mod classify {
    pub mod position_test;
    pub mod reduce_property_test;
}

// Department resolution tests
pub mod department {
    pub mod department_property_test;
}

// Alias resolution tests
pub mod resolver {
    pub mod alias_test;
}

// End-to-end tests
pub mod integration {
    pub mod batch_test;
    pub mod cli_input_test;
}
