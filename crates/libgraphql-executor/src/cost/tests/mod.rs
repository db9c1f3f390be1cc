mod cost_detail_tests;
