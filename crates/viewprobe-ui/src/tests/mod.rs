mod modifier_tests;
