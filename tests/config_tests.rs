use dylocate::*;

#[test]
fn test_platform_roots() {
	let roots = platform_roots();
	assert_eq!(roots.first(), Some(&Root::Base));
	assert_eq!(roots.last(), Some(&Root::Cd));
	assert_eq!(roots.contains(&Root::App), cfg!(target_os = "macos"));
}

#[test]
fn test_search_roots() {
	let roots = SearchRoots::new()
		.base("/opt/game")
		.cd("")
		.with_binary_dir("/usr/games");
	assert_eq!(roots.root(Root::Base).as_deref(), Some("/opt/game"));
	assert_eq!(roots.root(Root::Home), None);
	assert_eq!(roots.root(Root::Cd).as_deref(), Some(""));
	assert_eq!(Config::binary_dir(&roots).as_deref(), Some("/usr/games"));
}

#[test]
fn test_root_names() {
	assert_eq!(Root::Home.to_string(), "home_path");
	assert_eq!(Root::App.env_var(), "DYLOCATE_APP_PATH");
}

#[test]
fn test_from_env() {
	std::env::set_var(Root::Home.env_var(), "/home/test/.game");
	std::env::remove_var(Root::Cd.env_var());
	let roots = SearchRoots::from_env();
	assert_eq!(roots.root(Root::Home).as_deref(), Some("/home/test/.game"));
	assert_eq!(roots.root(Root::Cd), None);

	let exe = std::env::current_exe().unwrap();
	let dir = exe.parent().unwrap().to_str().unwrap();
	assert_eq!(Config::binary_dir(&roots).as_deref(), Some(dir));
}
