use camino::Utf8Path;

/// Flags whose value is a filesystem path, in either two-token
/// (`-I dir`) or attached (`-Idir`, `--sysroot=dir`) form.
pub const PATH_FLAGS: &[&str] = &["-isystem", "-I", "-iquote", "--sysroot="];

/// Rewrite relative path-valued flags against `working_dir`.
///
/// A token equal to one of [`PATH_FLAGS`] is the two-token form: the
/// token itself stays as-is and the token following it gets
/// absolutized. A token merely starting with a prefix is the attached
/// form and is rebuilt as prefix plus absolute path. Everything else
/// passes through; order and count never change.
///
/// ```
/// # use completion_flags::flags::rewrite::make_relative_paths_absolute;
/// # use camino::Utf8Path;
/// let flags = vec!["-I".to_string(), "include".to_string()];
/// assert_eq!(
///     make_relative_paths_absolute(&flags, Some(Utf8Path::new("/work"))),
///     vec!["-I".to_string(), "/work/include".to_string()]
/// );
/// assert_eq!(
///     make_relative_paths_absolute(&flags, None),
///     flags
/// );
/// ```
pub fn make_relative_paths_absolute(
    flags: &[String],
    working_dir: Option<&Utf8Path>,
) -> Vec<String> {
    let working_dir = match working_dir {
        Some(dir) => dir,
        None => return flags.to_vec(),
    };

    let mut new_flags = Vec::with_capacity(flags.len());
    let mut make_next_absolute = false;

    for flag in flags {
        let mut new_flag = flag.clone();

        if make_next_absolute {
            make_next_absolute = false;
            if !Utf8Path::new(flag).is_absolute() {
                new_flag = working_dir.join(flag).into_string();
            }
        }

        for path_flag in PATH_FLAGS {
            // exact match is the two-token form and wins over the
            // attached-form prefix match for the same token
            if flag == path_flag {
                make_next_absolute = true;
                break;
            }

            if let Some(path) = flag.strip_prefix(path_flag) {
                new_flag = format!("{}{}", path_flag, absolute(working_dir, path));
                break;
            }
        }

        new_flags.push(new_flag);
    }

    new_flags
}

fn absolute(working_dir: &Utf8Path, path: &str) -> String {
    if Utf8Path::new(path).is_absolute() {
        path.to_string()
    } else {
        working_dir.join(path).into_string()
    }
}
