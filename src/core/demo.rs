use crate::core::ops::{
    all_first_names_start_with, group_by_first_char, join_with_classes, parse_student, students,
};
use crate::core::roster::{shared_names, HairColorRoster, SharedNames};
use crate::domain::model::{Student, StudentClass};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use std::io::{BufRead, Write};
use std::rc::Rc;

/// The class every demo student belongs to.
const DEMO_CLASS_ID: u32 = 1;

/// The canonical demo data: three names (one of them deliberately missing
/// its last name) and a single class.
pub fn demo_dataset() -> (SharedNames, Vec<StudentClass>) {
    let names = shared_names(["athan Monzales", "Austin", "Marty mcfly"]);
    let classes = vec![StudentClass {
        class_id: DEMO_CLASS_ID,
        teacher: "Steve".to_string(),
    }];
    (names, classes)
}

/// Runs the fixed roster pipeline: predicate check, grouping, join, roster
/// construction and the aliasing demonstration, in that order.
pub struct RosterDemo<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> RosterDemo<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    pub fn run<W: Write, R: BufRead>(&self, out: &mut W, input: &mut R) -> Result<()> {
        let (names, classes) = demo_dataset();
        self.run_with(names, classes, out, input)
    }

    /// Same pipeline over a caller-supplied dataset. Tests hold on to the
    /// shared handle to observe the mutations made through the roster.
    pub fn run_with<W: Write, R: BufRead>(
        &self,
        names: SharedNames,
        classes: Vec<StudentClass>,
        out: &mut W,
        input: &mut R,
    ) -> Result<()> {
        if self.config.verbose() {
            tracing::debug!(
                names = names.borrow().len(),
                classes = classes.len(),
                "dataset initialized"
            );
        }

        // Universal-predicate check over the lazy mapping stage. With the
        // demo data "athan" decides the answer before the malformed
        // "Austin" entry is ever parsed.
        let all_start_with_m = {
            let names = names.borrow();
            all_first_names_start_with(
                students(names.iter().map(String::as_str), DEMO_CLASS_ID),
                'M',
            )?
        };
        if all_start_with_m {
            writeln!(out, "Not getting in here")?;
        }

        // Group names by their first character, first-appearance key order.
        {
            let names = names.borrow();
            for (key, group) in group_by_first_char(names.iter().map(String::as_str)) {
                tracing::debug!(%key, count = group.len(), "grouped names");
                for name in group {
                    writeln!(out, "{name} starts with {key}")?;
                }
            }
        }

        // Join students with their classes. Names that do not parse are
        // skipped with a warning so the rest of the demo stays reachable.
        let parsed: Vec<Student> = {
            let names = names.borrow();
            names
                .iter()
                .filter_map(|name| match parse_student(name, DEMO_CLASS_ID) {
                    Ok(student) => Some(student),
                    Err(e) => {
                        tracing::warn!("skipping name: {e}");
                        None
                    }
                })
                .collect()
        };
        for row in join_with_classes(&parsed, &classes) {
            writeln!(
                out,
                "{} {} has {} as their teacher.",
                row.first_name, row.last_name, row.teacher
            )?;
        }

        // Build the roster. "Black" shares the original handle rather than
        // copying it. Re-inserting an existing color would fail with
        // DuplicateColor and leave the first entry in place.
        let mut roster = HairColorRoster::new();
        roster.insert("Black", Rc::clone(&names))?;
        roster.insert("Bald", shared_names(["Martin"]))?;

        if let Some(black) = roster.get("Black") {
            if Rc::ptr_eq(black, &names) {
                writeln!(out, "They are the same")?;
            }
        }

        // Mutate through the roster; the original handle sees the push.
        if let Some(black) = roster.get("Black") {
            black.borrow_mut().push("new person".to_string());
        }

        for (color, students) in roster.iter() {
            writeln!(out, "The following students have {color}")?;

            students.borrow_mut().push("new person".to_string());

            for name in students.borrow().iter() {
                writeln!(out, "{name}")?;
            }
        }

        if self.config.wait_on_exit() {
            let mut line = String::new();
            input.read_line(&mut line)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    struct TestConfig {
        wait_on_exit: bool,
    }

    impl ConfigProvider for TestConfig {
        fn verbose(&self) -> bool {
            false
        }

        fn wait_on_exit(&self) -> bool {
            self.wait_on_exit
        }
    }

    fn run_demo(wait_on_exit: bool, input: &str) -> (Vec<String>, SharedNames) {
        let demo = RosterDemo::new(TestConfig { wait_on_exit });
        let (names, classes) = demo_dataset();
        let mut out = Vec::new();
        let mut input = Cursor::new(input.as_bytes().to_vec());

        demo.run_with(Rc::clone(&names), classes, &mut out, &mut input)
            .unwrap();

        let lines = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect();
        (lines, names)
    }

    #[test]
    fn pipeline_emits_the_expected_lines_in_order() {
        let (lines, _) = run_demo(false, "");

        assert_eq!(
            lines,
            vec![
                "athan Monzales starts with a",
                "Austin starts with A",
                "Marty mcfly starts with M",
                "athan Monzales has Steve as their teacher.",
                "Marty mcfly has Steve as their teacher.",
                "They are the same",
                "The following students have Black",
                "athan Monzales",
                "Austin",
                "Marty mcfly",
                "new person",
                "new person",
                "The following students have Bald",
                "Martin",
                "new person",
            ]
        );
    }

    #[test]
    fn original_sequence_grows_through_the_roster_aliases() {
        let (_, names) = run_demo(false, "");

        let names = names.borrow();
        assert_eq!(names.len(), 5);
        assert_eq!(&names[..3], ["athan Monzales", "Austin", "Marty mcfly"]);
        assert_eq!(&names[3..], ["new person", "new person"]);
    }

    #[test]
    fn waiting_run_consumes_one_input_line() {
        let demo = RosterDemo::new(TestConfig { wait_on_exit: true });
        let mut out = Vec::new();
        let mut input = Cursor::new(b"press enter\nleftover\n".to_vec());

        demo.run(&mut out, &mut input).unwrap();

        let mut rest = String::new();
        input.read_line(&mut rest).unwrap();
        assert_eq!(rest, "leftover\n");
    }

    #[test]
    fn guarded_line_is_never_printed_for_the_demo_data() {
        let (lines, _) = run_demo(false, "");
        assert!(!lines.iter().any(|l| l == "Not getting in here"));
    }
}
