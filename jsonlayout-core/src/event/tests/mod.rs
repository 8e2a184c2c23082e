mod access_event_tests;
