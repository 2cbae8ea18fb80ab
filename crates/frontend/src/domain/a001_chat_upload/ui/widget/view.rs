//! Chat Upload Widget - View Component

use super::view_model::ChatUploadVm;
use crate::shared::config::WidgetConfig;
use crate::shared::file_utils::collect_files;
use crate::shared::icons::icon;
use contracts::domain::a001_chat_upload::aggregate::{ChatMessage, UploadedFile};
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn ChatUploadWidget(config: WidgetConfig) -> impl IntoView {
    let drop_hint = config.drop_hint.clone();
    let select_label = config.select_label.clone();
    let files_heading = config.files_heading.clone();
    let placeholder = config.placeholder.clone();

    let vm = ChatUploadVm::new(config);
    let file_input_ref = NodeRef::<leptos::html::Input>::new();
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();

    // Прокрутка вниз при новом сообщении или индикаторе загрузки
    Effect::new(move |_| {
        vm.state.with(|s| (s.messages.len(), s.is_loading));
        if let Some(container) = messages_container_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    view! {
        <ConfigProvider>
            <div style="height: 100vh; width: 100%; max-width: 56rem; margin: 0 auto; display: flex; flex-direction: column; padding: 16px; box-sizing: border-box; background: var(--colorNeutralBackground2);">
                // Зона перетаскивания файлов
                <div
                    style="padding: 32px; margin-bottom: 16px; border: 2px dashed var(--colorBrandStroke2); border-radius: 8px; background: var(--colorNeutralBackground1); text-align: center;"
                    on:dragover=move |ev: web_sys::DragEvent| ev.prevent_default()
                    on:drop=move |ev: web_sys::DragEvent| {
                        ev.prevent_default();
                        let files = collect_files(ev.data_transfer().and_then(|dt| dt.files()));
                        vm.handle_file_selection(files);
                    }
                >
                    <div style="color: var(--colorNeutralForeground3); margin-bottom: 16px;">
                        {icon("upload")}
                    </div>
                    <p style="color: var(--colorNeutralForeground2); margin-bottom: 8px;">{drop_hint}</p>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| {
                            if let Some(input) = file_input_ref.get() {
                                input.click();
                            }
                        }
                    >
                        {select_label}
                    </Button>
                    <input
                        type="file"
                        multiple=true
                        style="display: none;"
                        node_ref=file_input_ref
                        on:change=move |ev| {
                            let input: web_sys::HtmlInputElement = event_target(&ev);
                            let files = collect_files(input.files());
                            // Сброс, чтобы повторный выбор того же файла вызвал change
                            input.set_value("");
                            vm.handle_file_selection(files);
                        }
                    />
                </div>

                // Список загруженных файлов
                <Show when=move || vm.state.with(|s| !s.uploaded_files.is_empty())>
                    <div style="margin-bottom: 16px; padding: 16px; background: var(--colorNeutralBackground1); border-radius: 8px; box-shadow: var(--shadow4);">
                        <h3 style="font-weight: 600; margin: 0 0 8px 0;">{files_heading.clone()}</h3>
                        <ul style="list-style: none; padding: 0; margin: 0; display: flex; flex-direction: column; gap: 8px;">
                            <For
                                each=move || {
                                    vm.state.with(|s| s.uploaded_files.iter().cloned().enumerate().collect::<Vec<_>>())
                                }
                                key=|(index, _)| *index
                                children=move |(_, file): (usize, UploadedFile)| {
                                    view! {
                                        <li style="font-size: 14px; color: var(--colorNeutralForeground2);">
                                            {icon("document")}
                                            " "
                                            {file.display_label()}
                                        </li>
                                    }
                                }
                            />
                        </ul>
                    </div>
                </Show>

                // Ошибки запросов (только при включённом show_errors)
                {move || {
                    let errors = vm.state.with(|s| s.errors());
                    (!errors.is_empty())
                        .then(|| {
                            view! {
                                <div style="margin-bottom: 16px;">
                                    <MessageBar intent=MessageBarIntent::Error>
                                        <div style="display: flex; align-items: center; justify-content: space-between; gap: 8px; width: 100%;">
                                            <div style="display: flex; flex-direction: column; gap: 4px;">
                                                {errors.into_iter().map(|e| view! { <span>{e}</span> }).collect_view()}
                                            </div>
                                            <button
                                                style="background: none; border: none; cursor: pointer; padding: 2px; color: var(--colorNeutralForeground3);"
                                                on:click=move |_| vm.dismiss_errors()
                                            >
                                                {icon("close")}
                                            </button>
                                        </div>
                                    </MessageBar>
                                </div>
                            }
                        })
                }}

                // Зона чата
                <div style="flex: 1; min-height: 0; background: var(--colorNeutralBackground1); border-radius: 8px; box-shadow: var(--shadow4); overflow: hidden; display: flex; flex-direction: column;">
                    <div
                        node_ref=messages_container_ref
                        style="flex: 1; padding: 16px; overflow-y: auto; display: flex; flex-direction: column; gap: 16px;"
                    >
                        <For
                            each=move || {
                                vm.state.with(|s| s.messages.iter().cloned().enumerate().collect::<Vec<_>>())
                            }
                            key=|(index, _)| *index
                            children=move |(_, msg): (usize, ChatMessage)| view! { <MessageBubble msg=msg /> }
                        />
                        <Show when=move || vm.state.with(|s| s.is_loading)>
                            <div style="display: flex; justify-content: flex-start;">
                                <div style="background: var(--colorNeutralBackground3); padding: 12px; border-radius: 8px;">
                                    <Spinner size=SpinnerSize::Small />
                                </div>
                            </div>
                        </Show>
                    </div>

                    // Поле ввода
                    <div style="padding: 16px; border-top: 1px solid var(--colorNeutralStroke2);">
                        <Flex style="gap: 8px;">
                            <input
                                type="text"
                                placeholder=placeholder
                                style="flex: 1; padding: 8px; border: 1px solid var(--colorNeutralStroke1); border-radius: 8px; outline: none;"
                                prop:value=move || vm.state.with(|s| s.input_text.clone())
                                on:input=move |ev| vm.set_input(event_target_value(&ev))
                                on:keydown=move |ev: web_sys::KeyboardEvent| {
                                    if ev.key() == "Enter" && !ev.is_composing() {
                                        ev.prevent_default();
                                        vm.handle_send_message();
                                    }
                                }
                            />
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| vm.handle_send_message()
                            >
                                {icon("send")}
                            </Button>
                        </Flex>
                    </div>
                </div>
            </div>
        </ConfigProvider>
    }
}

/// Пузырь сообщения: пользователь справа, ассистент слева
#[component]
#[allow(non_snake_case)]
fn MessageBubble(msg: ChatMessage) -> impl IntoView {
    let row_style = if msg.is_user {
        "display: flex; justify-content: flex-end;"
    } else {
        "display: flex; justify-content: flex-start;"
    };
    let bubble_style = if msg.is_user {
        "max-width: 75%; padding: 12px; border-radius: 8px; background: var(--colorBrandBackground); color: var(--colorNeutralForegroundOnBrand);"
    } else {
        "max-width: 75%; padding: 12px; border-radius: 8px; background: var(--colorNeutralBackground3); color: var(--colorNeutralForeground1);"
    };

    view! {
        <div style=row_style>
            <div style=bubble_style>
                <p style="margin: 0; white-space: pre-wrap;">{msg.text}</p>
                <span style="font-size: 12px; opacity: 0.75;">{msg.timestamp}</span>
            </div>
        </div>
    }
}
