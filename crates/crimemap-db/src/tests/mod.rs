mod category_tree_tests;
