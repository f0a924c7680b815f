use crate::task::Task;
use crate::ui::mvi::Reducer;
use crate::ui::tasks::intent::TaskListIntent;
use crate::ui::tasks::state::TaskListState;

pub struct TaskListReducer;

impl Reducer for TaskListReducer {
    type State = TaskListState;
    type Intent = TaskListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TaskListIntent::Load(tasks) => TaskListState { tasks, selected: 0 },
            TaskListIntent::Submit {
                description,
                due_date,
            } => {
                // Empty description or due date: silently ignored, no task
                // created (matches the add-button behavior users expect).
                if description.is_empty() || due_date.is_empty() {
                    return state;
                }
                let TaskListState { mut tasks, selected } = state;
                tasks.push(Task::new(description, due_date));
                TaskListState { tasks, selected }
            }
            TaskListIntent::DeleteSelected => {
                let TaskListState { mut tasks, selected } = state;
                if selected >= tasks.len() {
                    return TaskListState { tasks, selected };
                }
                tasks.remove(selected);
                let selected = selected.min(tasks.len().saturating_sub(1));
                TaskListState { tasks, selected }
            }
            TaskListIntent::CompleteSelected => {
                let TaskListState { mut tasks, selected } = state;
                if let Some(task) = tasks.get_mut(selected) {
                    task.mark_complete();
                }
                TaskListState { tasks, selected }
            }
            TaskListIntent::SelectUp => TaskListState {
                selected: state.selected.saturating_sub(1),
                tasks: state.tasks,
            },
            TaskListIntent::SelectDown => {
                let last = state.tasks.len().saturating_sub(1);
                TaskListState {
                    selected: (state.selected + 1).min(last),
                    tasks: state.tasks,
                }
            }
        }
    }
}
