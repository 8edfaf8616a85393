mod patch_tests;
