mod flow_tests;
