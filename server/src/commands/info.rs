use crate::state::VersionInfo;

pub(crate) fn print_info() {
    let versions = VersionInfo::from_env();

    println!("{} {}", versions.name, versions.version);
    println!("Default port: {}", crate::state::DEFAULT_PORT);
    println!(
        "Default expansion limit: {}",
        cookbook::DEFAULT_EXPANSION_LIMIT
    );
}
