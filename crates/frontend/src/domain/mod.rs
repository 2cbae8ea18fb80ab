pub mod a001_chat_upload;
