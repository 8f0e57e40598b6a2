mod health_test;
mod info_test;
mod metrics_test;
mod processes_test;
