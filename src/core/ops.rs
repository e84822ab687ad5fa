use crate::domain::model::{Student, StudentClass, StudentWithTeacher};
use crate::utils::error::{Result, RosterError};
use indexmap::IndexMap;

/// Parses a "First Last" name: the substring before the first whitespace
/// character becomes the first name, everything after it the last name.
pub fn parse_student(name: &str, class_id: u32) -> Result<Student> {
    let (first, last) =
        name.split_once(char::is_whitespace)
            .ok_or_else(|| RosterError::MalformedName {
                name: name.to_string(),
            })?;
    Ok(Student {
        first_name: first.to_string(),
        last_name: last.to_string(),
        class_id,
    })
}

/// Lazy Name→Student mapping stage. Nothing is parsed until the returned
/// iterator is enumerated, so a malformed name only surfaces at that point.
pub fn students<'a, I>(names: I, class_id: u32) -> impl Iterator<Item = Result<Student>> + 'a
where
    I: IntoIterator<Item = &'a str>,
    I::IntoIter: 'a,
{
    names
        .into_iter()
        .map(move |name| parse_student(name, class_id))
}

/// Short-circuit universal check: `Ok(false)` on the first parsed student
/// whose first name does not start with `prefix`, `Ok(true)` for an empty
/// sequence. A parse error is only returned if it is enumerated before the
/// check can decide.
pub fn all_first_names_start_with<I>(students: I, prefix: char) -> Result<bool>
where
    I: IntoIterator<Item = Result<Student>>,
{
    for student in students {
        if !student?.first_name.starts_with(prefix) {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Short-circuit existential check: `Ok(true)` on the first match,
/// `Ok(false)` for an empty sequence.
pub fn any_first_name_starts_with<I>(students: I, prefix: char) -> Result<bool>
where
    I: IntoIterator<Item = Result<Student>>,
{
    for student in students {
        if student?.first_name.starts_with(prefix) {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Keeps the names that start with `prefix`, preserving source order.
pub fn names_starting_with<'a, I>(names: I, prefix: char) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    names
        .into_iter()
        .filter(|name| name.starts_with(prefix))
        .collect()
}

/// Groups names by their first character (case-sensitive). Groups come out
/// in first-appearance order of the key and keep within-group source order.
/// An empty name has no first character and joins no group.
pub fn group_by_first_char<'a, I>(names: I) -> IndexMap<char, Vec<&'a str>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut groups: IndexMap<char, Vec<&'a str>> = IndexMap::new();
    for name in names {
        if let Some(key) = name.chars().next() {
            groups.entry(key).or_default().push(name);
        }
    }
    groups
}

/// Inner join of students with classes on `class_id`. Outer (student) order
/// determines row order; for one student, matching classes appear in class
/// order. A student with no matching class contributes no rows.
pub fn join_with_classes(
    students: &[Student],
    classes: &[StudentClass],
) -> Vec<StudentWithTeacher> {
    let mut rows = Vec::new();
    for student in students {
        for class in classes.iter().filter(|c| c.class_id == student.class_id) {
            rows.push(StudentWithTeacher {
                first_name: student.first_name.clone(),
                last_name: student.last_name.clone(),
                teacher: class.teacher.clone(),
            });
        }
    }
    rows
}
