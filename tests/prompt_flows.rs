#[cfg(test)]
mod tests {
    use chrono::Local;
    use tracsis::commands::create_task::{prompt_delivery_date, prompt_estimated_hours, select_project};
    use tracsis::commands::log::collect_work_entry;
    use tracsis::libs::prompt::{Prompter, Scripted};

    #[test]
    fn work_entry_defaults_date_to_today() {
        let mut prompter = Scripted::new(["Fix bug", "", "2.5"]);

        let entry = collect_work_entry(&mut prompter).unwrap();
        assert_eq!(entry.work_title, "Fix bug");
        assert_eq!(entry.work_date, Local::now().format("%Y/%m/%d").to_string());
        assert_eq!(entry.log_hour, 2.5);
    }

    #[test]
    fn work_entry_keeps_explicit_date() {
        let mut prompter = Scripted::new(["Code Review", "2026/08/01", "1"]);

        let entry = collect_work_entry(&mut prompter).unwrap();
        assert_eq!(entry.work_date, "2026/08/01");
        assert_eq!(entry.log_hour, 1.0);
    }

    #[test]
    fn work_entry_is_fatal_on_first_bad_hours_input() {
        // No retry loop here, unlike the create-task prompts.
        let mut prompter = Scripted::new(["Fix bug", "", "abc"]);
        assert!(collect_work_entry(&mut prompter).is_err());

        let mut prompter = Scripted::new(["Fix bug", "", "0"]);
        assert!(collect_work_entry(&mut prompter).is_err());

        let mut prompter = Scripted::new(["Fix bug", "", "-2"]);
        assert!(collect_work_entry(&mut prompter).is_err());
    }

    #[test]
    fn project_selection_is_one_based() {
        let projects = vec![(11, "Alpha".to_string()), (22, "Beta".to_string())];

        assert_eq!(select_project(&projects, &mut Scripted::new(["1"])).unwrap(), 11);
        assert_eq!(select_project(&projects, &mut Scripted::new(["2"])).unwrap(), 22);
    }

    #[test]
    fn project_selection_is_fatal_on_first_bad_input() {
        let projects = vec![(11, "Alpha".to_string()), (22, "Beta".to_string())];

        assert!(select_project(&projects, &mut Scripted::new(["0"])).is_err());
        assert!(select_project(&projects, &mut Scripted::new(["3"])).is_err());
        assert!(select_project(&projects, &mut Scripted::new(["abc"])).is_err());
    }

    #[test]
    fn delivery_date_reprompts_until_valid() {
        let mut prompter = Scripted::new(["yesterday", "2026-13-40", "2026-08-10"]);

        assert_eq!(prompt_delivery_date(&mut prompter).unwrap(), "2026-08-10");
    }

    #[test]
    fn estimated_hours_reprompt_until_positive() {
        let mut prompter = Scripted::new(["abc", "-1", "0", "3.5"]);

        assert_eq!(prompt_estimated_hours(&mut prompter).unwrap(), 3.5);
    }

    #[test]
    fn scripted_prompter_errors_once_exhausted() {
        let mut prompter = Scripted::new(Vec::<String>::new());

        assert!(prompter.input("title").is_err());
    }
}
