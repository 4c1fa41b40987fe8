mod z_table_tests;
