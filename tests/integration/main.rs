//! Integration tests for primecache

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;

    fn primecache() -> Command {
        cargo_bin_cmd!("primecache")
    }

    #[test]
    fn help_displays() {
        primecache()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Interactive primality tester"));
    }

    #[test]
    fn version_displays() {
        primecache()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("primecache"));
    }

    #[test]
    fn config_path_displays() {
        primecache()
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_show_displays_defaults() {
        let dir = tempfile::tempdir().unwrap();
        primecache()
            .args(["--config"])
            .arg(dir.path().join("missing.toml"))
            .arg("config")
            .assert()
            .success()
            .stdout(predicate::str::contains("[general]"))
            .stdout(predicate::str::contains("[list]"));
    }
}

mod repl_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::fs;
    use std::path::Path;

    fn repl(cache: &Path) -> Command {
        let mut cmd = cargo_bin_cmd!("primecache");
        cmd.arg("--cache").arg(cache);
        cmd
    }

    #[test]
    fn seeds_when_cache_missing() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("primes.cache");

        repl(&cache)
            .write_stdin("exit\n")
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Couldn't load cache, starting from scratch",
            ))
            .stdout(predicate::str::contains("Wrote cache of 2 primes to disk"));

        assert_eq!(fs::read_to_string(&cache).unwrap(), "2\n3\n");
    }

    #[test]
    fn reports_loaded_cache_size() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("primes.cache");
        fs::write(&cache, "2\n3\n5\n7\n11\n").unwrap();

        repl(&cache)
            .write_stdin("exit\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Loaded cache of 5 primes from disk"));
    }

    #[test]
    fn boundary_verdicts() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("primes.cache");

        repl(&cache)
            .write_stdin("0\n1\n2\n4\n97\nexit\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("0 is not a prime."))
            .stdout(predicate::str::contains("1 is a prime."))
            .stdout(predicate::str::contains("2 is a prime (cached)"))
            .stdout(predicate::str::contains("4 is not a prime (even number)"))
            .stdout(predicate::str::contains("97 is a prime"));
    }

    #[test]
    fn cached_verdicts_after_extension() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("primes.cache");
        fs::write(&cache, "2\n3\n5\n7\n11\n13\n").unwrap();

        repl(&cache)
            .write_stdin("13\n9\nexit\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("13 is a prime (cached)"))
            .stdout(predicate::str::contains("9 is not a prime (cached)"));
    }

    #[test]
    fn format_error_reprompts() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("primes.cache");

        repl(&cache)
            .write_stdin("seven\n7\nexit\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Input must be an integer"))
            .stdout(predicate::str::contains("7 is a prime"));
    }

    #[test]
    fn range_error_reprompts() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("primes.cache");

        repl(&cache)
            .write_stdin("-5\n3\nexit\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Integer must be positive"))
            .stdout(predicate::str::contains("3 is a prime (cached)"));
    }

    #[test]
    fn list_prints_table_and_count() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("primes.cache");
        fs::write(&cache, "2\n3\n5\n7\n11\n").unwrap();

        repl(&cache)
            .write_stdin("list\nexit\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("2         3         5"))
            .stdout(predicate::str::contains("Wrote out 5 prime numbers"));
    }

    #[test]
    fn list_columns_follow_config() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("primes.cache");
        let config = dir.path().join("config.toml");
        fs::write(&cache, "2\n3\n5\n7\n11\n13\n").unwrap();
        fs::write(&config, "[list]\ncolumns = 3\n").unwrap();

        let mut cmd = repl(&cache);
        cmd.arg("--config").arg(&config);
        cmd.write_stdin("list\nexit\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("2         3         5\n"))
            .stdout(predicate::str::contains("7         11        13\n"));
    }

    #[test]
    fn extension_reports_and_persists_factor_primes() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("primes.cache");

        repl(&cache)
            .write_stdin("10007\nexit\n")
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Creating potential factor primes finished in",
            ))
            .stdout(predicate::str::contains("10007 is a prime"));

        let persisted = fs::read_to_string(&cache).unwrap();
        assert!(persisted.starts_with("2\n3\n5\n7\n11\n"));
        assert!(persisted.contains("\n97\n"));
        // The target itself is not a factor prime and must not be stored.
        assert!(!persisted.contains("10007"));
    }

    #[test]
    fn covered_range_skips_extension() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("primes.cache");

        repl(&cache)
            .write_stdin("10007\n9973\nexit\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Skip creating potential factor primes"))
            .stdout(predicate::str::contains("9973 is a prime"));
    }

    #[test]
    fn large_prime_extends_correctly() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("primes.cache");

        repl(&cache)
            .write_stdin("9999999967\nexit\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("9999999967 is a prime"));
    }

    #[test]
    fn eof_acts_like_exit() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("primes.cache");

        repl(&cache)
            .write_stdin("7\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Wrote cache of"));
        assert!(cache.exists());
    }

    #[test]
    fn corrupt_cache_falls_back_to_seed() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("primes.cache");
        fs::write(&cache, "2\n3\ngarbage\n7\n").unwrap();

        repl(&cache)
            .write_stdin("exit\n")
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Couldn't load cache, starting from scratch",
            ));

        // The corrupt file is replaced by the seed, not a partial parse.
        assert_eq!(fs::read_to_string(&cache).unwrap(), "2\n3\n");
    }

    #[test]
    fn unwritable_cache_fails_with_nonzero_exit() {
        let dir = tempfile::tempdir().unwrap();
        // The temp dir itself is a directory, so the final write fails.
        repl(dir.path())
            .write_stdin("exit\n")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error:"));
    }
}

mod check_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::fs;

    fn primecache() -> Command {
        cargo_bin_cmd!("primecache")
    }

    #[test]
    fn one_shot_check() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("primes.cache");

        primecache()
            .arg("--cache")
            .arg(&cache)
            .args(["check", "97", "98"])
            .assert()
            .success()
            .stdout(predicate::str::contains("97 is a prime"))
            .stdout(predicate::str::contains("98 is not a prime (even number)"));

        assert!(cache.exists());
    }

    #[test]
    fn negative_target_reports_range_error() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("primes.cache");

        primecache()
            .arg("--cache")
            .arg(&cache)
            .args(["check", "-7", "5"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Integer must be positive"))
            .stdout(predicate::str::contains("5 is a prime"));
    }

    #[test]
    fn check_persists_between_runs() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("primes.cache");

        primecache()
            .arg("--cache")
            .arg(&cache)
            .args(["check", "10007"])
            .assert()
            .success();

        let first = fs::read_to_string(&cache).unwrap();

        primecache()
            .arg("--cache")
            .arg(&cache)
            .args(["check", "10007"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Skip creating potential factor primes"));

        // Second identical check is a fixed point for the cache.
        assert_eq!(fs::read_to_string(&cache).unwrap(), first);
    }
}

mod list_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::fs;

    fn primecache() -> Command {
        cargo_bin_cmd!("primecache")
    }

    #[test]
    fn plain_format_matches_cache_file() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("primes.cache");
        fs::write(&cache, "2\n3\n5\n").unwrap();

        primecache()
            .arg("--cache")
            .arg(&cache)
            .args(["list", "--format", "plain"])
            .assert()
            .success()
            .stdout("2\n3\n5\n");
    }

    #[test]
    fn json_format_has_count_and_primes() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("primes.cache");
        fs::write(&cache, "2\n3\n5\n").unwrap();

        primecache()
            .arg("--cache")
            .arg(&cache)
            .args(["list", "--format", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"count\": 3"))
            .stdout(predicate::str::contains("\"primes\""));
    }

    #[test]
    fn table_format_with_missing_cache_shows_seed() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("primes.cache");

        primecache()
            .arg("--cache")
            .arg(&cache)
            .arg("list")
            .assert()
            .success()
            .stdout(predicate::str::contains("Wrote out 2 prime numbers"));
    }
}
