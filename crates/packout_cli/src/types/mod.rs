pub mod framework_plugin;
