mod execution_context_tests;
