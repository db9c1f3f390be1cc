mod resolve_error_tests;
mod resolve_manager_tests;
mod resolve_params_tests;
